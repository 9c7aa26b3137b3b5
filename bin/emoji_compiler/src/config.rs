pub mod sections {
    use std::path::PathBuf;

    use emoji_data::OutputLayout;

    config::section! {
        #[serde(default)]
        pub struct Sources {
            /// Grouped source, in the `emoji-test.txt` layout
            pub grouped: PathBuf = "./dist/emoji/emoji-group.txt".into() => "EMOJI_GROUP_SOURCE",

            /// Canonically ordered source, in the `emoji-ordering.txt` layout
            pub ordered: PathBuf = "./dist/emoji/emoji-order.txt".into() => "EMOJI_ORDER_SOURCE",
        }
    }

    config::section! {
        #[serde(default)]
        pub struct Output {
            /// Directory the four documents are written to, created if missing
            pub dir: PathBuf = "./dist/emoji".into() => "EMOJI_OUTPUT_DIR",

            /// Emoji string to emoji record
            pub by_emoji: String = "data-by-emoji.json".to_owned(),

            /// Groups with their emojis in canonical order
            pub by_group: String = "data-by-group.json".to_owned(),

            /// Emoji strings in canonical order
            pub ordered: String = "data-ordered-emoji.json".to_owned(),

            /// Component slug to component emoji
            pub components: String = "data-emoji-components.json".to_owned(),

            /// Spaces per JSON indentation level
            pub indent: usize = 4 => "EMOJI_OUTPUT_INDENT" | config::util::parse[4usize],
        }
    }

    impl Output {
        pub fn layout(&self) -> OutputLayout {
            OutputLayout {
                by_emoji: self.by_emoji.clone(),
                by_group: self.by_group.clone(),
                ordered: self.ordered.clone(),
                components: self.components.clone(),
                indent: self.indent,
            }
        }
    }
}

config::config! {
    pub struct Config {
        /// Input files
        sources: sections::Sources,

        /// Output files
        output: sections::Output,
    }
}

//! Comment styles for inline error placeholders

/// Comment syntax used to render an error in place of a code block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// comment`
    #[default]
    Slash,
    /// `# comment`
    Hash,
    /// `-- comment`
    DoubleDash,
    /// `/* comment */`
    Block,
    /// `<!-- comment -->`
    Html,
}

impl CommentStyle {
    /// Pick the comment style for a code block language.
    ///
    /// Unknown or missing languages use `//`.
    pub fn for_language(lang: Option<&str>) -> Self {
        let Some(lang) = lang else {
            return Self::default();
        };
        match lang.to_lowercase().as_str() {
            "sh" | "bash" | "zsh" | "fish" | "shell" | "console" | "python" | "py" | "ruby"
            | "rb" | "perl" | "r" | "yaml" | "yml" | "toml" | "ini" | "dockerfile" | "make"
            | "makefile" | "cmake" | "nix" | "elixir" | "powershell" | "ps1" => Self::Hash,
            "sql" | "lua" | "haskell" | "hs" | "elm" | "ada" => Self::DoubleDash,
            "css" | "scss" | "less" => Self::Block,
            "html" | "xml" | "svg" | "markdown" | "md" | "mdx" | "vue" => Self::Html,
            _ => Self::Slash,
        }
    }

    /// Render `text` as a single comment line.
    pub fn format_line(&self, text: &str) -> String {
        match self {
            Self::Slash => format!("// {text}"),
            Self::Hash => format!("# {text}"),
            Self::DoubleDash => format!("-- {text}"),
            Self::Block => format!("/* {text} */"),
            Self::Html => format!("<!-- {text} -->"),
        }
    }
}

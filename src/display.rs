//! View state shared between the command layer and the renderer.

/// Text of the main view's result label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Headline {
    /// Nothing picked yet
    Ready,
    /// The most recent pick
    Picked(String),
    /// The last pick found no entries
    EmptyMenu,
}

impl Headline {
    pub fn text(&self) -> String {
        match self {
            Self::Ready => "Press Go to pick a meal".to_string(),
            Self::Picked(food) => format!("Eat: {food}"),
            Self::EmptyMenu => "The menu is empty! Add some food first".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking message box. While one is shown, every key except dismissal
/// is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

/// Which layer currently receives keyboard input, topmost first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Notice,
    Prompt,
    Editor,
    Main,
}

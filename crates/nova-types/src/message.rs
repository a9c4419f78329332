use serde::{Deserialize, Serialize};

/// Author of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
        }
    }
}

/// Time-based message stamp (milliseconds).
///
/// Two messages created in the same millisecond share an id, so this is a
/// display key only and never used to look a message up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl MessageId {
    /// The id one tick after this one. Replies use it so both halves of a turn
    /// sort together.
    pub fn next(self) -> Self {
        MessageId(self.0.saturating_add(1))
    }
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    /// Always empty for now: attachments are shown in the composer but never sent.
    #[serde(default)]
    pub files: Vec<Attachment>,
}

impl Message {
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            text: text.into(),
            files: Vec::new(),
        }
    }

    pub fn agent(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::Agent,
            text: text.into(),
            files: Vec::new(),
        }
    }
}

// ─── Attachments ─────────────────────────────────────────────

/// Coarse file category, used only to pick a badge and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKind {
    Image,
    Pdf,
    Archive,
    File,
}

impl AttachmentKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" => AttachmentKind::Image,
            "pdf" => AttachmentKind::Pdf,
            "zip" | "rar" | "7z" | "tar" => AttachmentKind::Archive,
            _ => AttachmentKind::File,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "IMG",
            AttachmentKind::Pdf => "PDF",
            AttachmentKind::Archive => "ZIP",
            AttachmentKind::File => "FILE",
        }
    }
}

/// A picked file, held in memory for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size: Option<u64>,
    pub kind: AttachmentKind,
}

impl Attachment {
    pub fn new(name: impl Into<String>, size: Option<u64>) -> Self {
        let name = name.into();
        let kind = AttachmentKind::from_extension(&extension_of(&name));
        Self { name, size, kind }
    }

    /// Lowercase text after the last dot, or the whole name if there is none
    pub fn extension(&self) -> String {
        extension_of(&self.name)
    }

    /// Up to three uppercase letters of the extension
    pub fn badge(&self) -> String {
        self.extension().chars().take(3).collect::<String>().to_uppercase()
    }

    pub fn size_label(&self) -> String {
        format_size(self.size)
    }
}

fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or("").to_ascii_lowercase()
}

/// Human-readable size: KB below one megabyte, MB above. Empty when unknown.
pub fn format_size(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return String::new();
    };
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{:.1} KB", kb)
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}

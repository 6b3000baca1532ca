//! The error record and its constructors
//!
//! A record is a cheap handle to an immutable node. Cloning the handle shares
//! the node, so a clone *is* the same record: equality is node identity and
//! never message text.

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Placeholder replaced by the cause's text in [`ErrorRecord::wrap_at`]
pub const CAUSE_PLACEHOLDER: &str = "{cause}";

/// Separator used by the conventional `"{message}: {cause}"` layout
pub const WRAP_SEPARATOR: &str = ": ";

type Payload = Box<dyn StdError + Send + Sync + 'static>;

/// An error value that may structurally wrap one earlier error
#[derive(Clone)]
pub struct ErrorRecord {
    node: Arc<Node>,
}

struct Node {
    /// Head message as supplied by the caller
    message: String,
    /// Fully rendered text, including any embedded cause text
    text: String,
    /// Typed payload for domain-specific kinds
    kind: Option<Payload>,
    kind_name: Option<&'static str>,
    cause: Option<ErrorRecord>,
}

impl ErrorRecord {
    fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Create a root record whose text is exactly `message`
    ///
    /// # Examples
    /// ```rust
    /// use errchain_core::ErrorRecord;
    ///
    /// let err = ErrorRecord::new("it is error");
    /// assert_eq!(err.text(), "it is error");
    /// assert!(err.is_root());
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::from_node(Node {
            text: message.clone(),
            message,
            kind: None,
            kind_name: None,
            cause: None,
        })
    }

    /// Wrap `cause` under `message`, rendered as `"{message}: {cause}"`
    ///
    /// # Examples
    /// ```rust
    /// use errchain_core::ErrorRecord;
    ///
    /// let root = ErrorRecord::new("this is error 1");
    /// let wrapped = ErrorRecord::wrap("wrap error", root.clone());
    /// assert_eq!(wrapped.text(), "wrap error: this is error 1");
    /// assert!(wrapped.is(&root));
    /// ```
    pub fn wrap(message: impl Into<String>, cause: impl Into<ErrorRecord>) -> Self {
        let message = message.into();
        let cause = cause.into();
        Self::from_node(Node {
            text: format!("{}{}{}", message, WRAP_SEPARATOR, cause.text()),
            message,
            kind: None,
            kind_name: None,
            cause: Some(cause),
        })
    }

    /// Wrap `cause`, embedding its text where `template` says
    ///
    /// The first [`CAUSE_PLACEHOLDER`] in `template` is replaced by the cause's
    /// text. Without a placeholder the conventional layout is used.
    pub fn wrap_at(template: impl Into<String>, cause: impl Into<ErrorRecord>) -> Self {
        let template = template.into();
        let cause = cause.into();
        let text = if template.contains(CAUSE_PLACEHOLDER) {
            template.replacen(CAUSE_PLACEHOLDER, cause.text(), 1)
        } else {
            format!("{}{}{}", template, WRAP_SEPARATOR, cause.text())
        };
        Self::from_node(Node {
            message: template,
            text,
            kind: None,
            kind_name: None,
            cause: Some(cause),
        })
    }

    /// Create a root record carrying a typed domain error
    ///
    /// The record renders as the value's `Display` and can be recovered with
    /// [`ErrorRecord::as_kind`].
    pub fn from_kind<K>(value: K) -> Self
    where
        K: StdError + Send + Sync + 'static,
    {
        let message = value.to_string();
        Self::from_node(Node {
            text: message.clone(),
            message,
            kind: Some(Box::new(value)),
            kind_name: Some(type_name::<K>()),
            cause: None,
        })
    }

    /// Create a typed record that also wraps `cause`
    pub fn wrap_kind<K>(value: K, cause: impl Into<ErrorRecord>) -> Self
    where
        K: StdError + Send + Sync + 'static,
    {
        let message = value.to_string();
        let cause = cause.into();
        Self::from_node(Node {
            text: format!("{}{}{}", message, WRAP_SEPARATOR, cause.text()),
            message,
            kind: Some(Box::new(value)),
            kind_name: Some(type_name::<K>()),
            cause: Some(cause),
        })
    }

    /// Fully rendered text, including every embedded cause
    pub fn text(&self) -> &str {
        &self.node.text
    }

    /// The message supplied at construction, before any cause was embedded
    ///
    /// For [`ErrorRecord::wrap_at`] this is the template itself, placeholder
    /// included.
    pub fn message(&self) -> &str {
        &self.node.message
    }

    /// The structurally wrapped record, if any
    pub fn cause(&self) -> Option<&ErrorRecord> {
        self.node.cause.as_ref()
    }

    pub fn has_cause(&self) -> bool {
        self.node.cause.is_some()
    }

    pub fn is_root(&self) -> bool {
        self.node.cause.is_none()
    }

    /// Type name of the domain payload, for typed records
    pub fn kind_name(&self) -> Option<&'static str> {
        self.node.kind_name
    }

    pub(crate) fn payload(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.node.kind.as_deref()
    }

    /// Whether `self` and `other` are handles to the same record
    pub fn same_as(&self, other: &ErrorRecord) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl PartialEq for ErrorRecord {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for ErrorRecord {}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl fmt::Debug for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRecord")
            .field("message", &self.node.message)
            .field("kind", &self.node.kind_name)
            .field("cause", &self.node.cause)
            .finish()
    }
}

impl StdError for ErrorRecord {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.cause() {
            Some(cause) => Some(cause as &(dyn StdError + 'static)),
            None => self.payload().and_then(|payload| payload.source()),
        }
    }
}

impl From<&str> for ErrorRecord {
    fn from(message: &str) -> Self {
        ErrorRecord::new(message)
    }
}

impl From<String> for ErrorRecord {
    fn from(message: String) -> Self {
        ErrorRecord::new(message)
    }
}

static_assertions::assert_impl_all!(ErrorRecord: Send, Sync, Clone);

//! Modal messages

/// Modal messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// Close the modal
    Close,
}

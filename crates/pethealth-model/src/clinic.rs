/// Veterinary clinic contact card shown in the sidebar.
///
/// Display-only data: initialised once by the seed and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VetClinic {
    pub name: String,
    pub hours: String,
    pub phone: String,
}

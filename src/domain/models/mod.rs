// Directory view models
// Read-only records hydrated from the director; replaced wholesale on refetch

pub mod capabilities;
pub mod namespace;
pub mod server;
pub mod token;

mod nullable;

pub use capabilities::Capabilities;
pub use namespace::{DirectorNamespace, NamespaceAssignment, NamespacePath};
pub use server::{GeoLocation, ServerBase, ServerDetailed, ServerGeneral, ServerType};
pub use token::{TokenGeneration, TokenIssuer};

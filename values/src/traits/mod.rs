mod element_kind;
mod vector_view;

pub use element_kind::ElementKind;
pub(crate) use element_kind::sealed;
pub use vector_view::VectorView;

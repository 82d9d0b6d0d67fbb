pub mod materializer;
pub mod name_map;
pub mod operation;
pub mod walker;

pub use materializer::{materialize, Materializer, Roots};
pub use name_map::{
    build_name_map, build_name_map_for, NameMap, NameVariants, Substituter, TemplateNames,
};
pub use operation::RenameOperation;
pub use walker::{walk, TreeWalker};

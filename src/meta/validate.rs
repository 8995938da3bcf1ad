use crate::{
	Schema,
	Table
};

/// Marks a [`Table`] as one of the tables of the [`Schema`] `S`
pub trait PartOf<S: Schema>: Table {}

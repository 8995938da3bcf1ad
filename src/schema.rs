use crate::Table;

pub trait Schema {
	type Tables: TableList;

	/// `CREATE TABLE` statements for every table
	fn define() -> String {
		let mut table_defs = Vec::new();
		Self::Tables::assemble_into(&mut table_defs);
		table_defs.join("\n")
	}

	/// Drop every table (if present) and define it anew
	fn replace() -> String {
		let mut table_defs = Vec::new();
		Self::Tables::replace_into(&mut table_defs);
		table_defs.join("\n")
	}
}

pub trait TableList {
	fn assemble_into(sql: &mut Vec<String>);
	fn replace_into(sql: &mut Vec<String>);
}

impl<T: Table> TableList for (T, ) {
	fn assemble_into(sql: &mut Vec<String>) {
		sql.push(T::assemble_sql())
	}
	fn replace_into(sql: &mut Vec<String>) {
		sql.push(T::drop_sql());
		sql.push(T::assemble_sql())
	}
}

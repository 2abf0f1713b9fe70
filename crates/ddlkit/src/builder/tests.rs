use super::*;
use crate::constraint::Constraint;
use crate::error::DdlError;
use crate::types::ColumnType;

#[test]
fn test_empty_table() {
    let decl = TableDeclaration::new("users");
    assert_eq!(decl.to_sql(), "CREATE TABLE IF NOT EXISTS `users` (\n\n);");
}

#[test]
fn test_empty_table_without_if_not_exists() {
    let decl = TableDeclaration::with_if_not_exists("users", false);
    assert_eq!(decl.to_sql(), "CREATE TABLE `users` (\n\n);");
}

#[test]
fn test_if_not_exists_toggle() {
    let decl = TableDeclaration::new("t").if_not_exists(false);
    assert!(!decl.is_if_not_exists());
    assert!(decl.to_sql().starts_with("CREATE TABLE `t` ("));
}

#[test]
fn test_string_default_length() {
    let decl = TableDeclaration::new("t").string("col");
    assert_eq!(
        decl.to_sql(),
        "CREATE TABLE IF NOT EXISTS `t` (\n\t`col` VARCHAR(50)\n);"
    );
}

#[test]
fn test_column_types() {
    let sql = TableDeclaration::new("t")
        .int("a")
        .int_with_length("b", 4)
        .text("c")
        .text_with_length("d", 255)
        .json("e")
        .timestamp("f")
        .timestamp_with_precision("g", 3)
        .decimal("h", 10, Some(2))
        .string_with_length("i", 100)
        .to_sql();

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS `t` (\n\
         \t`a` INT(11), \n\
         \t`b` INT(4), \n\
         \t`c` TEXT(65535), \n\
         \t`d` TEXT(255), \n\
         \t`e` JSON, \n\
         \t`f` TIMESTAMP, \n\
         \t`g` TIMESTAMP(3), \n\
         \t`h` DECIMAL, \n\
         \t`i` VARCHAR(100)\n\
         );"
    );
}

#[test]
fn test_constraint_attaches_to_last_column() {
    let decl = TableDeclaration::new("t").int("id").primary_key();
    assert_eq!(
        decl.to_sql(),
        "CREATE TABLE IF NOT EXISTS `t` (\n\t`id` INT(11) PRIMARY KEY\n);"
    );
    assert_eq!(decl.columns()[0].constraints, vec![Constraint::PrimaryKey]);
    assert!(decl.table_constraints().is_empty());
}

#[test]
fn test_constraints_keep_call_order() {
    let decl = TableDeclaration::new("t")
        .int("n")
        .unsigned()
        .not_null()
        .default_value("0");
    assert_eq!(decl.columns()[0].to_sql(), "`n` INT(11) UNSIGNED NOT NULL DEFAULT(0)");
}

#[test]
fn test_constraints_follow_most_recent_column() {
    let decl = TableDeclaration::new("t")
        .int("a")
        .not_null()
        .string("b")
        .nullable()
        .index();
    assert_eq!(decl.last_column(), Some("b"));
    assert_eq!(decl.columns()[0].to_sql(), "`a` INT(11) NOT NULL");
    assert_eq!(decl.columns()[1].to_sql(), "`b` VARCHAR(50) NULL INDEX");
}

#[test]
fn test_constraint_before_any_column_is_dropped() {
    let decl = TableDeclaration::new("t").not_null().unique().int("id");
    assert_eq!(
        decl.to_sql(),
        "CREATE TABLE IF NOT EXISTS `t` (\n\t`id` INT(11)\n);"
    );
    assert_eq!(
        decl.validate(),
        Err(DdlError::MissingColumn {
            constraint: "NOT NULL".to_string(),
        })
    );
}

#[test]
fn test_table_constraint_is_separate_line() {
    let decl = TableDeclaration::new("t").int("id").unique_on("id");
    assert_eq!(
        decl.to_sql(),
        "CREATE TABLE IF NOT EXISTS `t` (\n\t`id` INT(11), \n\tUNIQUE (`id`)\n);"
    );
    assert!(decl.columns()[0].constraints.is_empty());
}

#[test]
fn test_table_constraint_multiple_columns() {
    let decl = TableDeclaration::new("t")
        .int("a")
        .int("b")
        .primary_key_on(["a", "b"]);
    assert_eq!(
        decl.table_constraints()[0].to_sql(),
        "PRIMARY KEY (`a`, `b`)"
    );
}

#[test]
fn test_table_constraint_for_undeclared_column() {
    let decl = TableDeclaration::new("t").index_on("ghost");
    assert_eq!(
        decl.to_sql(),
        "CREATE TABLE IF NOT EXISTS `t` (\n, \n\tINDEX (`ghost`)\n);"
    );
    assert!(decl.validate().is_ok());
}

#[test]
fn test_table_constraint_does_not_move_last_column() {
    let decl = TableDeclaration::new("t")
        .int("a")
        .unique_on("b")
        .not_null();
    assert_eq!(decl.last_column(), Some("a"));
    assert_eq!(decl.columns()[0].to_sql(), "`a` INT(11) NOT NULL");
}

#[test]
fn test_table_constraint_same_text_overwrites() {
    let decl = TableDeclaration::new("t")
        .int("a")
        .int("b")
        .unique_on("a")
        .index_on("b")
        .unique_on("b");
    let clauses: Vec<String> = decl
        .table_constraints()
        .iter()
        .map(|c| c.to_sql())
        .collect();
    assert_eq!(clauses, vec!["UNIQUE (`b`)", "INDEX (`b`)"]);
}

#[test]
fn test_default_values_with_different_text_do_not_collide() {
    let decl = TableDeclaration::new("t")
        .default_value_on("0", "a")
        .default_value_on("1", "b");
    assert_eq!(decl.table_constraints().len(), 2);
    assert_eq!(decl.table_constraints()[1].to_sql(), "DEFAULT(1) (`b`)");
}

#[test]
fn test_empty_column_list_targets_last_column() {
    let decl = TableDeclaration::new("t")
        .int("id")
        .constraint_on(Constraint::Unique, Vec::<String>::new());
    assert!(decl.table_constraints().is_empty());
    assert_eq!(decl.columns()[0].to_sql(), "`id` INT(11) UNIQUE");
    assert_eq!(decl.validate(), Ok(()));
}

#[test]
fn test_empty_column_list_before_any_column_is_dropped() {
    let decl = TableDeclaration::new("t")
        .constraint_on(Constraint::Index, Vec::<String>::new());
    assert!(decl.table_constraints().is_empty());
    assert_eq!(decl.to_sql(), "CREATE TABLE IF NOT EXISTS `t` (\n\n);");
    assert_eq!(
        decl.validate(),
        Err(DdlError::MissingColumn {
            constraint: "INDEX".to_string(),
        })
    );
}

#[test]
fn test_redeclare_column_replaces_entry_in_place() {
    let decl = TableDeclaration::new("t")
        .int("a")
        .not_null()
        .int("b")
        .string("a");
    assert_eq!(decl.columns().len(), 2);
    assert_eq!(decl.columns()[0].to_sql(), "`a` VARCHAR(50)");
    assert_eq!(decl.columns()[1].name, "b");
    assert_eq!(decl.last_column(), Some("a"));
}

#[test]
fn test_render_is_repeatable() {
    let decl = TableDeclaration::new("t").int("id").primary_key().unique_on("id");
    let first = decl.to_sql();
    assert_eq!(first, decl.to_sql());
    assert_eq!(first, decl.to_string());
}

#[test]
fn test_enum_values_verbatim() {
    let decl = TableDeclaration::new("t").enumeration("s", vec![String::from("a'b")]);
    assert_eq!(decl.columns()[0].to_sql(), "`s` ENUM('a'b')");
}

#[test]
fn test_decimal_parameters_are_kept() {
    let decl = TableDeclaration::new("t").decimal("price", 10, Some(2));
    assert_eq!(
        decl.columns()[0].column_type,
        ColumnType::Decimal {
            length: 10,
            decimals: Some(2)
        }
    );
    assert_eq!(decl.columns()[0].to_sql(), "`price` DECIMAL");
}

#[test]
fn test_users_example() {
    let decl = TableDeclaration::new("users")
        .int("id")
        .auto_increment()
        .primary_key()
        .string_with_length("name", 100)
        .not_null()
        .enumeration("role", ["admin", "user"])
        .unique_on("name");

    let expected = "CREATE TABLE IF NOT EXISTS `users` (\n\
                    \t`id` INT(11) AUTO_INCREMENT PRIMARY KEY, \n\
                    \t`name` VARCHAR(100) NOT NULL, \n\
                    \t`role` ENUM('admin', 'user'), \n\
                    \tUNIQUE (`name`)\n\
                    );";
    assert_eq!(decl.to_sql(), expected);
    assert_eq!(decl.try_to_sql().unwrap(), expected);
}

// ==================== validate ====================

#[test]
fn test_validate_empty_table_name() {
    let decl = TableDeclaration::new("").int("id");
    assert_eq!(decl.validate(), Err(DdlError::EmptyTableName));
    assert_eq!(
        decl.to_sql(),
        "CREATE TABLE IF NOT EXISTS `` (\n\t`id` INT(11)\n);"
    );
}

#[test]
fn test_validate_empty_enum() {
    let decl = TableDeclaration::new("t").enumeration("e", Vec::<&str>::new());
    assert_eq!(
        decl.validate(),
        Err(DdlError::EmptyEnumValues {
            column: "e".to_string(),
        })
    );
    assert_eq!(decl.columns()[0].to_sql(), "`e` ENUM()");
}

#[test]
fn test_validate_zero_length() {
    let decl = TableDeclaration::new("t").string_with_length("s", 0);
    assert!(matches!(
        decl.try_to_sql(),
        Err(DdlError::InvalidLength { length: 0, .. })
    ));
}

#[test]
fn test_validate_keeps_first_error() {
    let decl = TableDeclaration::new("t")
        .column("", ColumnType::Json)
        .enumeration("e", Vec::<&str>::new());
    assert_eq!(decl.validate(), Err(DdlError::EmptyColumnName));
}

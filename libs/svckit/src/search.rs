//! Case-insensitive substring search over folded columns
//!
//! Database `LOWER()` only folds ASCII on SQLite, so searchable text is
//! folded here and stored next to the original; queries compare a folded
//! term against the folded column with LIKE metacharacters escaped.

use sea_orm::sea_query::{Expr, IntoColumnRef, LikeExpr, SimpleExpr};

const ESCAPE: char = '\\';

/// Unicode-aware case fold used on both the stored column and the term
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

fn escaped_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in fold(term).chars() {
        if matches!(c, ESCAPE | '%' | '_') {
            pattern.push(ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `%term%` with `\`, `%` and `_` escaped, term folded
pub fn contains_pattern(term: &str) -> LikeExpr {
    LikeExpr::new(escaped_pattern(term)).escape(ESCAPE)
}

/// `folded_column LIKE '%term%' ESCAPE '\'`
pub fn folded_contains<C: IntoColumnRef>(folded_column: C, term: &str) -> SimpleExpr {
    Expr::col(folded_column).like(contains_pattern(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::{Alias, PostgresQueryBuilder, Query, QueryStatementWriter};

    #[test]
    fn fold_handles_non_ascii() {
        assert_eq!(fold("Émile"), "émile");
        assert!(fold("ÇELİK").starts_with("çel"));
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(escaped_pattern("50%_off\\"), r"%50\%\_off\\%");
        assert_eq!(escaped_pattern("_"), r"%\_%");
    }

    #[test]
    fn term_is_folded() {
        assert_eq!(escaped_pattern("ÉMI"), "%émi%");
    }

    #[test]
    fn query_carries_escape_clause() {
        let sql = Query::select()
            .column(Alias::new("id"))
            .from(Alias::new("clients"))
            .and_where(folded_contains(Alias::new("name_folded"), "smi"))
            .to_string(PostgresQueryBuilder);
        assert!(sql.contains("ESCAPE"), "{sql}");
    }
}

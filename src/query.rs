// Structured builder for the course listing queries
// Filters combine with AND; the free-text search ORs over title/description

/// A value bound into a parameterized query.
///
/// Keeping parameters typed (instead of stringifying everything) lets the
/// repository bind ids as integers and search patterns as text.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i32),
    Text(String),
}

/// Builder for the course listing SQL.
///
/// Predicate clauses are only appended for filters that are actually
/// present, each one referencing a `$n` placeholder backed by a typed
/// parameter. Nothing user-supplied is ever concatenated into the SQL text.
pub struct CourseQueryBuilder {
    where_clauses: Vec<String>,
    params: Vec<SqlParam>,
    enrollment_join: bool,
}

impl CourseQueryBuilder {
    pub fn new() -> Self {
        Self {
            where_clauses: Vec::new(),
            params: Vec::new(),
            enrollment_join: false,
        }
    }

    /// Restrict to courses in the given category
    pub fn add_category_filter(&mut self, category_id: i32) {
        let param_index = self.params.len() + 1;
        self.where_clauses
            .push(format!("c.category_id = ${}", param_index));
        self.params.push(SqlParam::Int(category_id));
    }

    /// Restrict to courses of the given type
    pub fn add_type_filter(&mut self, type_id: i32) {
        let param_index = self.params.len() + 1;
        self.where_clauses
            .push(format!("c.type_id = ${}", param_index));
        self.params.push(SqlParam::Int(type_id));
    }

    /// Case-insensitive substring match over title OR description.
    /// One parameter, referenced twice.
    pub fn add_search_filter(&mut self, search: &str) {
        let param_index = self.params.len() + 1;
        self.where_clauses.push(format!(
            "(c.title ILIKE ${0} OR c.description ILIKE ${0})",
            param_index
        ));
        self.params.push(SqlParam::Text(format!("%{}%", search)));
    }

    /// Restrict to courses the given user is enrolled in.
    /// Adds the enrollment join to the base query.
    pub fn add_enrolled_filter(&mut self, user_id: i32) {
        let param_index = self.params.len() + 1;
        self.where_clauses
            .push(format!("ce.user_id = ${}", param_index));
        self.params.push(SqlParam::Int(user_id));
        self.enrollment_join = true;
    }

    /// Assemble the final query string and its bound parameters
    pub fn build(&self) -> (String, Vec<SqlParam>) {
        let mut query = String::from(
            "SELECT c.course_id, c.title, c.description, c.type_id, c.category_id, \
             c.created_by, ct.type_name, cat.category_name \
             FROM courses c",
        );

        if self.enrollment_join {
            query.push_str(" JOIN course_enrollments ce ON c.course_id = ce.course_id");
        }

        query.push_str(
            " JOIN course_types ct ON c.type_id = ct.type_id \
             JOIN categories cat ON c.category_id = cat.category_id",
        );

        if !self.where_clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&self.where_clauses.join(" AND "));
        }

        (query, self.params.clone())
    }
}

impl Default for CourseQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_query_has_no_where_clause() {
        let builder = CourseQueryBuilder::new();
        let (query, params) = builder.build();

        assert!(query.starts_with("SELECT c.course_id"));
        assert!(query.contains("JOIN course_types ct"));
        assert!(query.contains("JOIN categories cat"));
        assert!(!query.contains("WHERE"));
        assert!(!query.contains("course_enrollments"));
        assert!(params.is_empty());
    }

    #[test]
    fn test_category_filter() {
        let mut builder = CourseQueryBuilder::new();
        builder.add_category_filter(3);
        let (query, params) = builder.build();

        assert!(query.contains("WHERE c.category_id = $1"));
        assert_eq!(params, vec![SqlParam::Int(3)]);
    }

    #[test]
    fn test_type_filter() {
        let mut builder = CourseQueryBuilder::new();
        builder.add_type_filter(2);
        let (query, params) = builder.build();

        assert!(query.contains("WHERE c.type_id = $1"));
        assert_eq!(params, vec![SqlParam::Int(2)]);
    }

    #[test]
    fn test_search_filter_binds_one_param_twice() {
        let mut builder = CourseQueryBuilder::new();
        builder.add_search_filter("intro");
        let (query, params) = builder.build();

        assert!(query.contains("(c.title ILIKE $1 OR c.description ILIKE $1)"));
        assert_eq!(params, vec![SqlParam::Text("%intro%".to_string())]);
    }

    #[test]
    fn test_combined_filters_use_and() {
        let mut builder = CourseQueryBuilder::new();
        builder.add_category_filter(1);
        builder.add_type_filter(4);
        builder.add_search_filter("rust");
        let (query, params) = builder.build();

        assert!(query.contains("c.category_id = $1"));
        assert!(query.contains(" AND c.type_id = $2"));
        assert!(query.contains(" AND (c.title ILIKE $3 OR c.description ILIKE $3)"));
        assert_eq!(
            params,
            vec![
                SqlParam::Int(1),
                SqlParam::Int(4),
                SqlParam::Text("%rust%".to_string()),
            ]
        );
    }

    #[test]
    fn test_enrolled_filter_adds_join() {
        let mut builder = CourseQueryBuilder::new();
        builder.add_enrolled_filter(42);
        builder.add_search_filter("sql");
        let (query, params) = builder.build();

        assert!(query.contains("JOIN course_enrollments ce ON c.course_id = ce.course_id"));
        assert!(query.contains("ce.user_id = $1"));
        assert!(query.contains("(c.title ILIKE $2 OR c.description ILIKE $2)"));
        assert_eq!(
            params,
            vec![SqlParam::Int(42), SqlParam::Text("%sql%".to_string())]
        );
    }

    #[test]
    fn test_enrollment_join_precedes_lookup_joins() {
        let mut builder = CourseQueryBuilder::new();
        builder.add_enrolled_filter(7);
        let (query, _) = builder.build();

        let ce = query.find("JOIN course_enrollments").unwrap();
        let ct = query.find("JOIN course_types").unwrap();
        assert!(ce < ct);
    }
}

//! Select-query building blocks: equality filter, ordering and limit.

/// Equality filter on a single column.
#[derive(Debug, Clone)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    pub(crate) fn to_param(&self) -> (String, String) {
        (self.column.clone(), format!("eq.{}", self.value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordering on a single column.
#[derive(Debug, Clone)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Descending,
        }
    }

    pub(crate) fn to_param(&self) -> String {
        let dir = match self.direction {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        format!("{}.{}", self.column, dir)
    }
}

/// Options for a [`crate::RecordStore::select`] call.
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    pub filter: Option<Filter>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn order_param_encodes_direction() {
        assert_eq!(Order::asc("created_at").to_param(), "created_at.asc");
        assert_eq!(Order::desc("created_at").to_param(), "created_at.desc");
    }

    #[test]
    fn filter_param_uses_eq_operator() {
        let (column, value) = Filter::eq("read", "false").to_param();
        assert_eq!(column, "read");
        assert_eq!(value, "eq.false");
    }
}

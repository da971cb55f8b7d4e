use mongodb::bson::{Bson, Document};
use std::cmp::Ordering;

/// A scalar a filter or patch can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Bool(bool),
    Int(i64),
}

impl FieldValue {
    pub fn to_bson(&self) -> Bson {
        match self {
            FieldValue::Str(s) => Bson::String(s.clone()),
            FieldValue::Bool(b) => Bson::Boolean(*b),
            FieldValue::Int(i) => Bson::Int64(*i),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Ne,
    Lt,
    Gt,
}

impl Op {
    fn operator(self) -> &'static str {
        match self {
            Op::Eq => "$eq",
            Op::Ne => "$ne",
            Op::Lt => "$lt",
            Op::Gt => "$gt",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Condition {
    field: String,
    op: Op,
    value: FieldValue,
}

/// Conjunction of field predicates.
///
/// ```ignore
/// let overdue = Filter::new()
///     .eq("user_id", "u1")
///     .eq("completed", false)
///     .ne("due_date", "")
///     .lt("due_date", now);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, field: impl Into<String>, op: Op, value: impl Into<FieldValue>) -> Self {
        self.conditions.push(Condition {
            field: field.into(),
            op,
            value: value.into(),
        });
        self
    }

    pub fn eq(self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.push(field, Op::Eq, value)
    }

    pub fn ne(self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.push(field, Op::Ne, value)
    }

    pub fn lt(self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.push(field, Op::Lt, value)
    }

    pub fn gt(self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.push(field, Op::Gt, value)
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render as a MongoDB query document.
    ///
    /// A field with a single equality renders as `{field: value}`; any other
    /// combination renders as an operator document on that field.
    pub fn to_document(&self) -> Document {
        let mut fields: Vec<(&str, Vec<&Condition>)> = Vec::new();
        for condition in &self.conditions {
            match fields.iter_mut().find(|(field, _)| *field == condition.field) {
                Some((_, group)) => group.push(condition),
                None => fields.push((condition.field.as_str(), vec![condition])),
            }
        }

        let mut document = Document::new();
        for (field, group) in fields {
            match group.as_slice() {
                [single] if single.op == Op::Eq => {
                    document.insert(field, single.value.to_bson());
                }
                _ => {
                    let mut operators = Document::new();
                    for condition in group {
                        operators.insert(condition.op.operator(), condition.value.to_bson());
                    }
                    document.insert(field, operators);
                }
            }
        }
        document
    }

    /// Evaluate against a stored document.
    ///
    /// A missing field never equals, is never ordered, and is always "not equal".
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions.iter().all(|condition| {
            let expected = condition.value.to_bson();
            let ordering = document
                .get(&condition.field)
                .and_then(|actual| compare_bson(actual, &expected));
            match condition.op {
                Op::Eq => ordering == Some(Ordering::Equal),
                Op::Ne => ordering != Some(Ordering::Equal),
                Op::Lt => ordering == Some(Ordering::Less),
                Op::Gt => ordering == Some(Ordering::Greater),
            }
        })
    }
}

/// Order two values of the same kind; `None` when they are not comparable.
pub(crate) fn compare_bson(left: &Bson, right: &Bson) -> Option<Ordering> {
    fn number(value: &Bson) -> Option<f64> {
        match value {
            Bson::Int32(i) => Some(f64::from(*i)),
            Bson::Int64(i) => Some(*i as f64),
            Bson::Double(d) => Some(*d),
            _ => None,
        }
    }

    match (left, right) {
        (Bson::String(a), Bson::String(b)) => Some(a.cmp(b)),
        (Bson::Boolean(a), Bson::Boolean(b)) => Some(a.cmp(b)),
        (Bson::ObjectId(a), Bson::ObjectId(b)) => Some(a.bytes().cmp(&b.bytes())),
        (Bson::Null, Bson::Null) => Some(Ordering::Equal),
        _ => number(left)?.partial_cmp(&number(right)?),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Filter, ordering and window of a paged read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filter: Filter,
    pub sort: Vec<Sort>,
    /// `<= 0` returns no items
    pub limit: i64,
    pub offset: u64,
}

impl Query {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn sort_by(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }

    /// Zero-based paging: `offset = page * limit`. Negative pages read from the start.
    pub fn page(mut self, page: i64, limit: i64) -> Self {
        self.limit = limit;
        self.offset = (page.max(0) as u64).saturating_mul(limit.max(0) as u64);
        self
    }

    pub(crate) fn sort_document(&self) -> Option<Document> {
        if self.sort.is_empty() {
            return None;
        }
        let mut document = Document::new();
        for sort in &self.sort {
            let direction = match sort.direction {
                SortDirection::Ascending => 1,
                SortDirection::Descending => -1,
            };
            document.insert(sort.field.clone(), direction);
        }
        Some(document)
    }
}

/// A page of results plus the size of the full filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<E> {
    pub items: Vec<E>,
    pub total: u64,
}

impl<E> Page<E> {
    pub fn map<T>(self, f: impl FnMut(E) -> T) -> Page<T> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Field assignments applied with `$set` semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    fields: Vec<(String, FieldValue)>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }

    pub fn to_document(&self) -> Document {
        self.fields()
            .map(|(field, value)| (field.to_string(), value.to_bson()))
            .collect()
    }
}

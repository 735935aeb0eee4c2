use crate::form::Form;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    key: String,
    op: String,
    value: String,
}

/// Search criteria appended to list requests.
///
/// A criterion without an operator is sent as `key=value`, one with an
/// operator as `key[op]=value` (for example `created[gte]=1400000000`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    filters: Vec<Filter>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filter(
        &mut self,
        key: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.filters.push(Filter {
            key: key.into(),
            op: op.into(),
            value: value.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Writes every criterion into `form`.
    pub fn append_to(&self, form: &mut Form) {
        for filter in &self.filters {
            if filter.op.is_empty() {
                form.add(filter.key.as_str(), filter.value.as_str());
            } else {
                form.add(format!("{}[{}]", filter.key, filter.op), filter.value.as_str());
            }
        }
    }
}

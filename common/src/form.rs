use url::form_urlencoded;

/// Form-encoded request body.
///
/// Keeps every pair in insertion order and allows repeated keys, so the same
/// body can carry scalar fields and bracketed entries such as `metadata[tier]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pairs: Vec<(String, String)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under `key`, keeping any earlier values.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Keys in insertion order, one entry per pair.
    pub fn keys(&self) -> Vec<&str> {
        self.pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the body as `application/x-www-form-urlencoded`, sorted by key.
    pub fn encode(&self) -> String {
        let mut sorted: Vec<&(String, String)> = self.pairs.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in sorted {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Form
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Form::new();
        form.extend(iter);
        form
    }
}

impl<K, V> Extend<(K, V)> for Form
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_repeated_keys() {
        let mut form = Form::new();
        form.add("expand", "data");
        form.add("expand", "customer");

        assert_eq!(form.len(), 2);
        assert_eq!(form.get("expand"), Some("data"));
        assert_eq!(form.get_all("expand"), vec!["data", "customer"]);
    }

    #[test]
    fn encode_sorts_by_key_and_escapes() {
        let form: Form = [
            ("name", "Gold Plan"),
            ("amount", "1000"),
            ("metadata[tier]", "top"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            form.encode(),
            "amount=1000&metadata%5Btier%5D=top&name=Gold+Plan"
        );
    }

    #[test]
    fn empty_form_encodes_to_empty_string() {
        let form = Form::new();
        assert!(form.is_empty());
        assert_eq!(form.encode(), "");
    }

    #[test]
    fn missing_key_lookups() {
        let form: Form = [("id", "gold")].into_iter().collect();
        assert!(form.contains("id"));
        assert!(!form.contains("name"));
        assert_eq!(form.get("name"), None);
        assert!(form.get_all("name").is_empty());
    }
}

//! Flat query-parameter encoding shared by every operation.
//!
//! Values are appended in call order; absent optionals contribute nothing.
//! Percent-encoding happens later, when the client renders the URL.

use crate::domain::Page;

pub type Params = Vec<(String, String)>;

pub(crate) fn push(params: &mut Params, key: &str, value: impl Into<String>) {
    params.push((key.to_owned(), value.into()));
}

pub(crate) fn push_opt<V: ToString>(params: &mut Params, key: &str, value: Option<V>) {
    if let Some(value) = value {
        params.push((key.to_owned(), value.to_string()));
    }
}

/// `key=1` when set, nothing otherwise.
pub(crate) fn push_flag(params: &mut Params, key: &str, value: bool) {
    if value {
        params.push((key.to_owned(), "1".to_owned()));
    }
}

/// `key=1` / `key=0` when present.
pub(crate) fn push_bool(params: &mut Params, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        let value = if value { "1" } else { "0" };
        params.push((key.to_owned(), value.to_owned()));
    }
}

/// Comma-separated list, skipped when empty.
pub(crate) fn push_joined<I, S>(params: &mut Params, key: &str, values: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = values
        .into_iter()
        .map(|value| value.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(",");
    if !joined.is_empty() {
        params.push((key.to_owned(), joined));
    }
}

/// `key[0]=..&key[1]=..`
pub(crate) fn push_indexed<I, S>(params: &mut Params, key: &str, values: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (idx, value) in values.into_iter().enumerate() {
        params.push((format!("{key}[{idx}]"), value.as_ref().to_owned()));
    }
}

/// `key[i][j]=..` in row-major order.
pub(crate) fn push_matrix(params: &mut Params, key: &str, rows: &[Vec<String>]) {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            params.push((format!("{key}[{row_idx}][{col_idx}]"), value.clone()));
        }
    }
}

/// `key[name]=value` for each pair.
pub(crate) fn push_keyed<'a, I>(params: &mut Params, key: &str, pairs: I)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (name, value) in pairs {
        params.push((format!("{key}[{name}]"), value.to_owned()));
    }
}

pub(crate) fn push_page(params: &mut Params, page: Page) {
    push_opt(params, "limit", page.limit);
    push_opt(params, "offset", page.offset);
}

#[cfg(test)]
pub(crate) fn render(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

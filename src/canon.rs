/// Renders the data-check string: entries sorted by key (byte-wise,
/// stable for duplicate keys), each as `key=value`, joined with `\n`.
/// Must match the platform's own rendering byte for byte.
pub(crate) fn data_check_string(fields: &[(String, String)]) -> String {
    let mut fields = fields.iter().collect::<Vec<_>>();
    fields.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
    fields
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

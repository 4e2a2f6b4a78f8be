/// Config sections that can be set from `PORTAL_<SECTION>__<KEY>`.
const SECTIONS: [(&str, &str); 3] = [
    ("API", "PORTAL_API__BASE_URL"),
    ("SESSION", "PORTAL_SESSION__PATH"),
    ("GENERAL", "PORTAL_GENERAL__DEFAULT_FORMAT"),
];

/// Emit warnings for env var keys that figment silently ignores.
pub fn warn_unconfigured() {
    for warning in collect_warnings(std::env::vars().map(|(key, _)| key)) {
        tracing::warn!("{warning}");
    }
}

fn collect_warnings<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let keys = keys.into_iter().collect::<Vec<_>>();

    SECTIONS
        .iter()
        .filter(|(section, _)| {
            let single = format!("PORTAL_{section}_");
            let double = format!("PORTAL_{section}__");
            keys.iter()
                .any(|key| key.starts_with(&single) && !key.starts_with(&double))
        })
        .map(|(section, example)| {
            format!(
                "PORTAL_{section}_* env vars are ignored. Use double underscores (example: {example})."
            )
        })
        .collect()
}

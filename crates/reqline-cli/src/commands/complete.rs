use reqline_core::Namespace;

/// Print the full names of commands completing `prefix`, one per line.
pub fn complete(namespace: &Namespace, prefix: &str) {
    for variant in namespace.completions(prefix) {
        println!("{}", variant.raw_name());
    }
}

pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Human-readable size with one decimal place, e.g. `1.5 KB`.
    pub fn format_size(size: u64) -> String {
        if size == 0 {
            return "0 B".to_string();
        }

        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        // Ties round up, so 1280 bytes reads 1.3 KB rather than 1.2 KB.
        let rounded = (size * 10.0).round() / 10.0;
        format!("{:.1} {}", rounded, UNITS[unit_index])
    }

    /// Uppercased text after the last `.`, or `?` when the name has no dot.
    /// A leading dot counts, so `.bashrc` yields `BASHRC`.
    pub fn file_ext(name: &str) -> String {
        match name.rfind('.') {
            Some(idx) => name[idx + 1..].to_uppercase(),
            None => "?".to_string(),
        }
    }
}

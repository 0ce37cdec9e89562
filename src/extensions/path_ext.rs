use std::path::Path;

pub trait ExportPath {
    fn string_file_name(&self) -> &str;

    /// Export folders are named `<app> <kind> <author> ...`, the third word names the author.
    fn author_from_folder_name(&self) -> Option<String>;
}

impl ExportPath for Path {
    fn string_file_name(&self) -> &str {
        self.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
    }

    fn author_from_folder_name(&self) -> Option<String> {
        let folder_name = self.file_name()?.to_str()?;
        folder_name
            .split(' ')
            .nth(2)
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .map(str::to_owned)
    }
}

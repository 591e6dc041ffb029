use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn create_directory(path: &Path) {
    std::fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", path, e));
}

pub fn delete_path(path: &Path) {
    if path.is_dir() {
        std::fs::remove_dir_all(path)
            .unwrap_or_else(|e| panic!("Failed to delete directory {:?}: {}", path, e));
    } else {
        std::fs::remove_file(path)
            .unwrap_or_else(|e| panic!("Failed to delete file {:?}: {}", path, e));
    }
}

/// Writes a random tree of `files_count` files per directory, `depth` levels deep.
/// Returns the paths of the written files relative to `dir`, joined with `/`.
pub fn write_generated_tree(
    dir: &Path,
    files_count: usize,
    subdirs_count: usize,
    depth: usize,
) -> Vec<String> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    create_directory(dir);
    let mut written = Vec::new();

    for index in 0..files_count {
        let file_name = format!("{}_{}.txt", Word().fake::<String>(), index);
        let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
        write_file(FileSpec::new(dir.join(&file_name), file_content));
        written.push(file_name);
    }

    if depth > 0 {
        for index in 0..subdirs_count {
            let dir_name = format!("dir_{}_{}", Word().fake::<String>(), index);
            let nested =
                write_generated_tree(&dir.join(&dir_name), files_count, subdirs_count, depth - 1);
            written.extend(nested.into_iter().map(|path| format!("{dir_name}/{path}")));
        }
    }

    written
}

/// Mirrors a tree written by [`write_generated_tree`] into `to`.
pub fn copy_tree(from: &Path, to: &Path) {
    create_directory(to);
    for entry in std::fs::read_dir(from).expect("Failed to list directory") {
        let entry = entry.expect("Failed to read directory entry");
        let target = to.join(entry.file_name());
        if entry.path().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), &target)
                .unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", entry.path(), e));
        }
    }
}

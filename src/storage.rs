use std::io;
use std::path::{Component, Path, PathBuf};

use tokio::fs;
use tokio::io::{AsyncRead, AsyncWriteExt};

/// Flat per-category directories under a single storage root.
#[derive(Clone, Debug)]
pub struct LocalFileStorage {
    base_dir: PathBuf,
}

impl LocalFileStorage {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Copies `reader` to `<base>/<folder>/<file_name>`, replacing whatever was there.
    ///
    /// The folder is created if missing; an existing folder is not an error. The
    /// destination handle is dropped on every return path, including a failed copy.
    pub async fn put_stream<R>(&self, folder: &str, file_name: &str, reader: &mut R) -> io::Result<u64>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let path = self.resolve_path(folder, file_name)?;
        fs::create_dir_all(self.base_dir.join(folder)).await?;
        let mut file = fs::File::create(&path).await?;
        let written = tokio::io::copy(reader, &mut file).await?;
        file.flush().await?;
        Ok(written)
    }

    pub fn resolve_path(&self, folder: &str, file_name: &str) -> io::Result<PathBuf> {
        if !is_single_component(folder) || !is_single_component(file_name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to write outside storage root: {folder}/{file_name}"),
            ));
        }
        Ok(self.base_dir.join(folder).join(file_name))
    }
}

fn is_single_component(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !segment.contains(['/', '\\'])
}

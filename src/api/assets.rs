//! Static files under `/app/`.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, error};

use crate::app::AppState;
use crate::request::Request;
use crate::response::{ContentType, Response};
use crate::status::Status;

const INDEX: &str = "index.html";

/// Serves a file from the asset root. Mounted at `/app/`, so the
/// `path` parameter holds what follows the prefix, still percent-encoded.
pub async fn serve(state: AppState, req: Request) -> Response {
    let raw = req.param("path").unwrap_or_default();
    let Ok(rel) = urlencoding::decode(raw) else {
        debug!(raw, "asset path is not UTF-8 once decoded");
        return Response::status(Status::NotFound);
    };
    // Traversal is checked on the decoded form.
    let Some(path) = resolve(state.assets(), &rel) else {
        debug!(%rel, "rejected asset path");
        return Response::status(Status::NotFound);
    };

    let path = match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_dir() => path.join(INDEX),
        _ => path,
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let content_type = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or(ContentType::OctetStream, ContentType::from_extension);
            Response::builder().bytes(content_type, bytes)
        }
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory | ErrorKind::NotADirectory) => {
            Response::status(Status::NotFound)
        }
        Err(e) => {
            error!(path = %path.display(), "failed to read asset: {e}");
            Response::status(Status::InternalServerError)
        }
    }
}

/// Joins `rel` onto `root`, refusing anything that could step outside it.
fn resolve(root: &Path, rel: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for component in Path::new(rel).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(path)
}

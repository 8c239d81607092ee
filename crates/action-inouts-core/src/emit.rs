//! Assembly and writing of the generated file.

// Internal imports (std, crate)
use std::path::Path;

use crate::{Error, Result};

// External imports (alphabetized)
use tokio::fs;

/// License banner placed at the top of every generated file
pub const DEFAULT_BANNER: &str = "\
/*************************************************************************************************
 *  Copyright (c) Red Hat, Inc. All rights reserved.
 *  Licensed under the MIT License. See LICENSE file in the project root for license information.
 **************************************************************************************************/";

/// Banner, blank line, do-not-edit notice naming `generated_by`, blank line.
pub fn header(banner: &str, generated_by: &str) -> String {
    format!(
        "{}\n\n///// This file is auto-generated by {} - Do not edit by hand!\n\n",
        banner.trim_end(),
        generated_by
    )
}

/// Full file contents: header, inputs enum, blank line, outputs enum.
pub fn assemble(header: &str, inputs: &str, outputs: &str) -> String {
    let mut contents = String::with_capacity(header.len() + inputs.len() + outputs.len() + 1);
    contents.push_str(header);
    contents.push_str(inputs);
    contents.push('\n');
    contents.push_str(outputs);
    contents
}

/// Write `contents` to `path`, replacing whatever is there.
///
/// Parent directories are not created; a missing one is an error.
pub async fn emit<P: AsRef<Path>>(contents: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    log::debug!("Writing {} bytes to {}", contents.len(), path.display());
    fs::write(path, contents)
        .await
        .map_err(|e| Error::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_header() {
        let header = header(DEFAULT_BANNER, "scripts/generate.rs");
        assert!(header.starts_with("/****"));
        assert!(header.contains(" *  Copyright (c) Red Hat, Inc. All rights reserved.\n"));
        assert!(header.ends_with(
            "****/\n\n///// This file is auto-generated by scripts/generate.rs - Do not edit by hand!\n\n"
        ));
    }

    #[test]
    fn test_custom_banner_trailing_newline() {
        assert_eq!(
            header("// MIT\n", "gen"),
            "// MIT\n\n///// This file is auto-generated by gen - Do not edit by hand!\n\n"
        );
    }

    #[test]
    fn test_assemble() {
        let contents = assemble("H\n\n", "export enum Inputs {\n}\n", "export enum Outputs {\n}\n");
        assert_eq!(
            contents,
            "H\n\nexport enum Inputs {\n}\n\nexport enum Outputs {\n}\n"
        );
    }

    #[tokio::test]
    async fn test_emit_overwrites() -> crate::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("inputs-outputs.ts");
        tokio::fs::write(&path, "stale content that is longer than the new one").await?;

        emit("fresh\n", &path).await?;
        assert_eq!(tokio::fs::read_to_string(&path).await?, "fresh\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_emit_missing_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("inputs-outputs.ts");
        let err = emit("x", &path).await.unwrap_err();
        match err {
            Error::Write { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!dir.path().join("missing").exists());
    }
}

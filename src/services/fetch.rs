use crate::domain::models::FetchReport;
use anyhow::Context;
use log::info;
use std::io;
use std::path::Path;

/// Download the classic snap and write it to `workdir`, named by the URL's
/// basename (what `wget` would have produced).
pub fn pull_snap(url: &str, workdir: &Path, dry_run: bool) -> anyhow::Result<FetchReport> {
    let file = basename(url)?;
    let dest = workdir.join(&file);

    if dry_run {
        info!("would fetch {} into {}", url, dest.display());
        return Ok(FetchReport {
            url: url.to_string(),
            file,
            bytes: 0,
            dry_run: true,
        });
    }

    info!("fetching {}", url);
    let response = ureq::get(url)
        .call()
        .with_context(|| format!("fetching {url}"))?;
    let mut body = response.into_reader();
    let mut out = std::fs::File::create(&dest)
        .with_context(|| format!("creating {}", dest.display()))?;
    let bytes = io::copy(&mut body, &mut out)
        .with_context(|| format!("writing {}", dest.display()))?;

    Ok(FetchReport {
        url: url.to_string(),
        file,
        bytes,
        dry_run: false,
    })
}

/// Last path segment of the URL, ignoring query and fragment.
fn basename(url: &str) -> anyhow::Result<String> {
    let trimmed = url
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or(url);
    let rest = trimmed
        .split_once("://")
        .map(|(_, r)| r)
        .unwrap_or(trimmed);
    let name = rest.rsplit('/').next().unwrap_or("");
    if name.is_empty() || name == rest {
        anyhow::bail!("snap url has no usable file name: {url}");
    }
    Ok(name.to_string())
}

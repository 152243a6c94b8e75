// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Declaration,
    Implementation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub role: Role,
}

impl SourceFile {
    /// The name shown in the file's banner.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// The declaration and implementation files, each in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    pub declarations: Vec<SourceFile>,
    pub implementations: Vec<SourceFile>,
}

impl Collected {
    /// All files in bundle order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.declarations.iter().chain(self.implementations.iter())
    }
}

/// Resolves file names against `base_dir`. Nothing is opened here, a missing
/// file only shows up when it's read.
pub fn collect<D, I>(base_dir: &Path, declarations: D, implementations: I) -> Collected
where
    D: IntoIterator,
    D::Item: AsRef<Path>,
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    Collected {
        declarations: resolve(base_dir, declarations, Role::Declaration),
        implementations: resolve(base_dir, implementations, Role::Implementation),
    }
}

fn resolve<N>(base_dir: &Path, names: N, role: Role) -> Vec<SourceFile>
where
    N: IntoIterator,
    N::Item: AsRef<Path>,
{
    names
        .into_iter()
        .map(|name| SourceFile {
            path: base_dir.join(name),
            role,
        })
        .collect()
}

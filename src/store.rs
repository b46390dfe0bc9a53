//! JSON-backed persistence for the contact list. The store owns both the file
//! path and the in-memory list so every mutation can immediately rewrite the
//! file; there is exactly one reader/writer (the running process), so a plain
//! full-file rewrite is the whole durability story.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use directories::BaseDirs;

use crate::error::{Error, Result};
use crate::models::Contact;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".deskmate";
/// Contact file name stored inside the application data directory.
const DATA_FILE_NAME: &str = "contacts.json";

/// Owns the persisted contact list. Identity of a contact is its position in
/// the list; callers resolve display rows to positions through the view layer
/// before calling the index-based mutations here.
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Open the store at the default location inside the user's home
    /// directory, loading whatever the file currently holds.
    pub fn open() -> anyhow::Result<Self> {
        let path = default_path()?;
        Self::open_at(path).context("failed to load contact file")
    }

    /// Open the store against an explicit path. A missing file yields an
    /// empty list; a file that exists but is not valid JSON fails with a
    /// parse error that is propagated untouched.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contacts = load_file(&path)?;
        Ok(Self { path, contacts })
    }

    /// The full in-memory list, in store order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Append a contact to the end of the list and persist. A blank name is
    /// the one invariant enforced at creation time.
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        validate(&contact)?;
        self.contacts.push(contact);
        self.save()
    }

    /// Overwrite the contact at `index` in place and persist. Position is
    /// preserved, so the record keeps its identity.
    pub fn replace(&mut self, index: usize, contact: Contact) -> Result<()> {
        validate(&contact)?;
        let len = self.contacts.len();
        let slot = self
            .contacts
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = contact;
        self.save()
    }

    /// Remove the contact at `index` and persist. Later records shift down by
    /// one position.
    pub fn remove(&mut self, index: usize) -> Result<Contact> {
        if index >= self.contacts.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.contacts.len(),
            });
        }
        let removed = self.contacts.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Serialize the full list pretty-printed and overwrite the file. Called
    /// after every mutation; also usable directly to re-persist the current
    /// state.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.contacts)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Read and deserialize the contact file, treating absence as an empty list.
fn load_file(path: &Path) -> Result<Vec<Contact>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    let contacts = serde_json::from_str(&raw)?;
    Ok(contacts)
}

/// Reject records that would violate the non-empty-name invariant.
fn validate(contact: &Contact) -> Result<()> {
    if contact.name.trim().is_empty() {
        return Err(Error::validation("Name is required."));
    }
    Ok(())
}

/// Resolve the absolute path to the contact file inside the user's home.
fn default_path() -> anyhow::Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DATA_FILE_NAME))
}

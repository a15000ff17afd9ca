//! WiFi credentials persisted in a small byte region
//!
//! Layout: `'\n' ssid '\n' password '\n'`, zero padded to
//! [`CREDENTIALS_STORAGE_SIZE`]. A region that does not start with the
//! separator holds no credentials.

use embedded_storage::Storage;
use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::CREDENTIALS_STORAGE_SIZE;

pub const SSID_CAPACITY: usize = 32;
pub const PASSWORD_CAPACITY: usize = 64;

const SEPARATOR: u8 = b'\n';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsError<E> {
    /// The underlying storage failed
    Storage(E),
    /// SSID or password does not fit its buffer
    TooLong,
    /// Stored bytes are not UTF-8
    InvalidUtf8,
    /// SSID or password contains the separator byte
    InvalidCharacter,
    /// The region starts like a record but is missing a separator
    Corrupted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String<SSID_CAPACITY>,
    pub password: String<PASSWORD_CAPACITY>,
}

impl WifiCredentials {
    pub fn new<E>(ssid: &str, password: &str) -> Result<Self, CredentialsError<E>> {
        Ok(Self {
            ssid: to_field(ssid.as_bytes())?,
            password: to_field(password.as_bytes())?,
        })
    }
}

fn to_field<E, const N: usize>(bytes: &[u8]) -> Result<String<N>, CredentialsError<E>> {
    if bytes.contains(&SEPARATOR) {
        return Err(CredentialsError::InvalidCharacter);
    }
    let text = core::str::from_utf8(bytes).map_err(|_| CredentialsError::InvalidUtf8)?;
    let mut field = String::new();
    field
        .push_str(text)
        .map_err(|()| CredentialsError::TooLong)?;
    Ok(field)
}

/// Credential persistence on top of any `embedded-storage` backend
pub struct CredentialStore<S> {
    storage: S,
    offset: u32,
}

impl<S: Storage> CredentialStore<S> {
    /// Use the region starting at `offset` inside `storage`
    pub const fn new(storage: S, offset: u32) -> Self {
        Self { storage, offset }
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Load stored credentials, `None` if nothing was saved
    pub fn read(&mut self) -> Result<Option<WifiCredentials>, CredentialsError<S::Error>> {
        let mut region = [0u8; CREDENTIALS_STORAGE_SIZE];
        self.storage
            .read(self.offset, &mut region)
            .map_err(CredentialsError::Storage)?;

        let Some(record) = region.strip_prefix(&[SEPARATOR]) else {
            return Ok(None);
        };
        let mut fields = record.splitn(3, |byte| *byte == SEPARATOR);
        let (Some(ssid), Some(password), Some(_)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(CredentialsError::Corrupted);
        };

        Ok(Some(WifiCredentials {
            ssid: to_field(ssid)?,
            password: to_field(password)?,
        }))
    }

    /// Replace whatever is stored with `credentials`
    pub fn write(&mut self, credentials: &WifiCredentials) -> Result<(), CredentialsError<S::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("credentials: writing ssid {}", credentials.ssid.as_str());
        let mut region = [0u8; CREDENTIALS_STORAGE_SIZE];
        let ssid = credentials.ssid.as_bytes();
        let password = credentials.password.as_bytes();

        let chunks: [&[u8]; 5] = [&[SEPARATOR], ssid, &[SEPARATOR], password, &[SEPARATOR]];
        let mut cursor = 0;
        for chunk in chunks {
            region[cursor..cursor + chunk.len()].copy_from_slice(chunk);
            cursor += chunk.len();
        }

        self.storage
            .write(self.offset, &region)
            .map_err(CredentialsError::Storage)
    }

    /// Zero the whole region
    pub fn erase(&mut self) -> Result<(), CredentialsError<S::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("credentials: erasing");
        self.storage
            .write(self.offset, &[0u8; CREDENTIALS_STORAGE_SIZE])
            .map_err(CredentialsError::Storage)
    }
}

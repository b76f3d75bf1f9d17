// File Operations for Keys and Signatures
// Handles key persistence, signature files and whole-file sign/verify

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::buffer::{ByteBuffer, Endian};
use crate::config::FileConfig;
use crate::error::{Result, RsaError};
use crate::rsa::{sign, verify, RsaKey, RsaKeyPair};

/// Width of the length prefix in front of each key field
const LENGTH_PREFIX: usize = 8;

/// Read entire file into a buffer
pub fn read_file(path: &Path) -> Result<ByteBuffer> {
    Ok(ByteBuffer::from(fs::read(path)?))
}

/// Write buffer contents to file
pub fn write_file(path: &Path, data: &ByteBuffer) -> Result<()> {
    fs::write(path, data.as_bytes())?;
    Ok(())
}

fn push_field(out: &mut ByteBuffer, field: &ByteBuffer) {
    out.append(&(field.len() as u64).to_le_bytes());
    out.append(field.as_bytes());
}

fn take_field(data: &ByteBuffer, offset: &mut usize, name: &str) -> Result<ByteBuffer> {
    let mut raw = [0u8; LENGTH_PREFIX];
    if data.save(&mut raw, LENGTH_PREFIX, *offset as isize, Endian::Big) != LENGTH_PREFIX {
        return Err(RsaError::MalformedKey(format!("missing {} length", name)));
    }
    *offset += LENGTH_PREFIX;

    let len = u64::from_le_bytes(raw) as usize;
    if data.len() - *offset < len {
        return Err(RsaError::MalformedKey(format!(
            "{} needs {} bytes, {} left",
            name,
            len,
            data.len() - *offset
        )));
    }

    let mut field = ByteBuffer::with_capacity(len);
    field.load(data.as_bytes(), len, *offset, Endian::Big);
    *offset += len;
    Ok(field)
}

/// Serialize a key as `[u64 LE length][modulus][u64 LE length][exponent]`,
/// both integers big-endian
pub fn encode_key(key: &RsaKey) -> ByteBuffer {
    let n = ByteBuffer::from_integer(&key.n);
    let exp = ByteBuffer::from_integer(&key.exp);

    let mut out = ByteBuffer::with_capacity(2 * LENGTH_PREFIX + n.len() + exp.len());
    push_field(&mut out, &n);
    push_field(&mut out, &exp);
    out
}

/// Parse the layout written by [`encode_key`]
pub fn decode_key(data: &ByteBuffer) -> Result<RsaKey> {
    let mut offset = 0;
    let n = take_field(data, &mut offset, "modulus")?;
    let exp = take_field(data, &mut offset, "exponent")?;

    if offset != data.len() {
        return Err(RsaError::MalformedKey(format!(
            "{} unexpected trailing bytes",
            data.len() - offset
        )));
    }

    let key = RsaKey::new(n.to_integer(), exp.to_integer());
    key.validate()?;
    Ok(key)
}

/// Save an RSA key to a file
pub fn save_key(path: &Path, key: &RsaKey) -> Result<()> {
    write_file(path, &encode_key(key))?;
    info!(path = %path.display(), modulus_bits = key.bit_length(), "saved key");
    Ok(())
}

/// Load an RSA key from a file
pub fn load_key(path: &Path) -> Result<RsaKey> {
    let key = decode_key(&read_file(path)?)?;
    info!(path = %path.display(), modulus_bits = key.bit_length(), "loaded key");
    Ok(key)
}

/// Write `stem` + public suffix and `stem` + secret suffix.
/// Returns the two paths, public first.
pub fn save_keypair(stem: &str, keys: &RsaKeyPair, config: &FileConfig) -> Result<(PathBuf, PathBuf)> {
    let pk_path = PathBuf::from(config.public_key_path(stem));
    let sk_path = PathBuf::from(config.secret_key_path(stem));

    save_key(&pk_path, &keys.public_key)?;
    save_key(&sk_path, &keys.secret_key)?;
    Ok((pk_path, sk_path))
}

/// Save raw signature bytes, no prefix
pub fn save_signature(path: &Path, signature: &ByteBuffer) -> Result<()> {
    write_file(path, signature)
}

/// Load raw signature bytes
pub fn load_signature(path: &Path) -> Result<ByteBuffer> {
    let signature = read_file(path)?;
    if signature.is_empty() {
        return Err(RsaError::MalformedSignature(format!(
            "{} is empty",
            path.display()
        )));
    }
    Ok(signature)
}

/// Sign a file and save its signature to `sign_path`
pub fn sign_file(sign_path: &Path, file_path: &Path, key: &RsaKey) -> Result<()> {
    let data = read_file(file_path)?;
    let signature = sign(&data, key)?;
    save_signature(sign_path, &signature)?;

    info!(
        file = %file_path.display(),
        signature = %sign_path.display(),
        bytes = data.len(),
        "signed file"
    );
    Ok(())
}

/// Verify a file against the signature stored in `sign_path`
pub fn verify_file(sign_path: &Path, file_path: &Path, key: &RsaKey) -> Result<bool> {
    let signature = load_signature(sign_path)?;
    if signature.len() > key.byte_length() {
        return Err(RsaError::MalformedSignature(format!(
            "{} holds {} bytes, modulus is {}",
            sign_path.display(),
            signature.len(),
            key.byte_length()
        )));
    }
    let data = read_file(file_path)?;
    let valid = verify(&signature, &data, key)?;

    info!(file = %file_path.display(), valid, "verified file");
    Ok(valid)
}

use crate::errors::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// `<type> <decimal-length>\0`
    pub fn header(&self, payload_len: usize) -> String {
        format!("{} {}\0", self.as_str(), payload_len)
    }

    /// Split an encoded object into its declared type and payload.
    ///
    /// The declared length must match the number of bytes after the NUL.
    pub fn split_encoded(encoded: &[u8]) -> crate::Result<(ObjectType, &[u8])> {
        let nul = encoded
            .iter()
            .position(|byte| *byte == 0)
            .ok_or_else(|| Error::CorruptObject("missing header terminator".to_string()))?;
        let header = std::str::from_utf8(&encoded[..nul])
            .map_err(|_| Error::CorruptObject("header is not valid UTF-8".to_string()))?;

        let (object_type, size) = header
            .split_once(' ')
            .ok_or_else(|| Error::CorruptObject(format!("malformed header '{header}'")))?;
        let object_type = ObjectType::try_from(object_type)?;
        let size = size
            .parse::<usize>()
            .map_err(|_| Error::CorruptObject(format!("invalid object size '{size}'")))?;

        let payload = &encoded[nul + 1..];
        if payload.len() != size {
            return Err(Error::CorruptObject(format!(
                "declared size {size} does not match payload size {}",
                payload.len()
            )));
        }

        Ok((object_type, payload))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = Error;

    fn try_from(value: &str) -> crate::Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            other => Err(Error::CorruptObject(format!("unknown object type '{other}'"))),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

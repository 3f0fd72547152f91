use crate::error::{Error, Result};

pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ValidationError("Token name cannot be empty".to_string()));
    }
    if name.len() > 64 {
        return Err(Error::ValidationError("Token name is too long".to_string()));
    }
    Ok(())
}

pub fn validate_symbol(symbol: &str) -> Result<()> {
    if symbol.is_empty() {
        return Err(Error::ValidationError("Symbol cannot be empty".to_string()));
    }
    if symbol.len() > 16 {
        return Err(Error::ValidationError("Symbol is too long".to_string()));
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::ValidationError(
            "Symbol must contain only letters and digits".to_string(),
        ));
    }
    Ok(())
}

/// Shape check on a user-friendly TON address. Full parsing belongs to the
/// SDK layer upstream; this only rejects obviously malformed identifiers.
pub fn validate_address(address: &str) -> Result<()> {
    if address.len() != 48 {
        return Err(Error::ValidationError(format!(
            "Address must be 48 characters, got {}",
            address.len()
        )));
    }
    if !address
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(Error::ValidationError(
            "Address contains characters outside base64url".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("MemeTon").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("  ").is_err());
        assert!(validate_name(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_symbol() {
        assert!(validate_symbol("MEME").is_ok());
        assert!(validate_symbol("meme2").is_ok());
        assert!(validate_symbol("").is_err());
        assert!(validate_symbol("ME ME").is_err());
        assert!(validate_symbol(&"M".repeat(17)).is_err());
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("EQDNtSKblX4-stYHbJj0gzXvbxN4Dz0je7rk1-I73REFABrh").is_ok());
        assert!(validate_address("short").is_err());
        assert!(validate_address(&"!".repeat(48)).is_err());
    }
}

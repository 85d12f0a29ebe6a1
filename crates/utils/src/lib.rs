use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Creates a random alphanumeric string of length `len`
pub fn create_random_secret(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_creates_secret_of_given_length() {
        assert_eq!(create_random_secret(16).len(), 16);
        assert!(create_random_secret(0).is_empty());
        assert!(create_random_secret(32).chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

/// Size accounting shared by run reports
pub trait CompressionStats {
    /// Returns the uncompressed size in bytes
    fn uncompressed_size(&self) -> u64;

    /// Returns the compressed size in bytes
    fn compressed_size(&self) -> u64;

    /// Returns the compression ratio
    fn compression_ratio(&self) -> f64 {
        if self.compressed_size() > 0 {
            self.uncompressed_size() as f64 / self.compressed_size() as f64
        } else {
            1.0
        }
    }

    /// Returns the space savings as a percentage
    fn space_savings(&self) -> f64 {
        if self.uncompressed_size() > 0 {
            (1.0 - (self.compressed_size() as f64 / self.uncompressed_size() as f64)) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockStats {
        uncompressed: u64,
        compressed: u64,
    }

    impl CompressionStats for MockStats {
        fn uncompressed_size(&self) -> u64 {
            self.uncompressed
        }

        fn compressed_size(&self) -> u64 {
            self.compressed
        }
    }

    #[test]
    fn test_compression_ratio() {
        let stats = MockStats {
            uncompressed: 1000,
            compressed: 100,
        };
        assert_eq!(stats.compression_ratio(), 10.0);

        let empty = MockStats {
            uncompressed: 0,
            compressed: 0,
        };
        assert_eq!(empty.compression_ratio(), 1.0);
    }

    #[test]
    fn test_space_savings() {
        let stats = MockStats {
            uncompressed: 1000,
            compressed: 100,
        };
        assert_eq!(stats.space_savings(), 90.0);

        // Expansion shows up as negative savings
        let stats2 = MockStats {
            uncompressed: 100,
            compressed: 120,
        };
        let savings = stats2.space_savings();
        assert!((savings + 20.0).abs() < 0.0001);
    }
}

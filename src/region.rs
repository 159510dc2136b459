use crate::{Error, Result};

// Kept in ascending order so the error message can list them directly.
static REGIONS: &[(&str, &str)] = &[
    ("ap-northeast-1", "s3-ap-northeast-1.amazonaws.com"),
    ("ap-southeast-1", "s3-ap-southeast-1.amazonaws.com"),
    ("eu-west-1", "s3-eu-west-1.amazonaws.com"),
    ("us-east-1", "s3.amazonaws.com"),
    ("us-west-1", "s3-us-west-1.amazonaws.com"),
    ("us-west-2", "s3-us-west-2.amazonaws.com"),
];

/// Look up the S3 endpoint host for a region.
///
/// Unknown regions fail with [`ErrorKind::ConfigInvalid`][crate::ErrorKind]
/// and a message enumerating every supported region.
pub fn host_for_region(region: &str) -> Result<&'static str> {
    match REGIONS.iter().find(|(r, _)| *r == region) {
        Some((_, host)) => Ok(host),
        None => Err(Error::config_invalid(format!(
            "Invalid value '{}' for region. Valid Amazon S3 regions are {}",
            region,
            REGIONS
                .iter()
                .map(|(r, _)| *r)
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use test_case::test_case;

    #[test_case("us-east-1", "s3.amazonaws.com")]
    #[test_case("us-west-1", "s3-us-west-1.amazonaws.com")]
    #[test_case("us-west-2", "s3-us-west-2.amazonaws.com")]
    #[test_case("eu-west-1", "s3-eu-west-1.amazonaws.com")]
    #[test_case("ap-southeast-1", "s3-ap-southeast-1.amazonaws.com")]
    #[test_case("ap-northeast-1", "s3-ap-northeast-1.amazonaws.com")]
    fn test_host_for_region(region: &str, host: &str) {
        assert_eq!(host_for_region(region).unwrap(), host);
    }

    #[test]
    fn test_unknown_region() {
        let err = host_for_region("unknown").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(
            err.to_string(),
            "Invalid value 'unknown' for region. Valid Amazon S3 regions are \
             ap-northeast-1, ap-southeast-1, eu-west-1, us-east-1, us-west-1, us-west-2"
        );
    }
}

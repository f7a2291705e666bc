use serde::Deserializer;

/// 年级筛选参数反序列化
///
/// 查询字符串里的年级以字符串传入；空值和 "All" 视为不筛选。
pub fn deserialize_optional_grade<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct GradeVisitor;

    impl<'de> Visitor<'de> for GradeVisitor {
        type Value = Option<u8>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a grade between 1 and 5, \"All\" or an empty value")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            u8::try_from(value)
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            u8::try_from(value)
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Signed(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(GradeVisitor)
}

#[cfg(test)]
mod tests {
    use crate::models::students::requests::StudentListParams;

    #[test]
    fn test_grade_from_query_string() {
        let params: StudentListParams = serde_json::from_str(r#"{"grade":"3"}"#).unwrap();
        assert_eq!(params.grade, Some(3));
    }

    #[test]
    fn test_grade_all_or_empty_means_no_filter() {
        let params: StudentListParams = serde_json::from_str(r#"{"grade":"All"}"#).unwrap();
        assert_eq!(params.grade, None);
        let params: StudentListParams = serde_json::from_str(r#"{"grade":""}"#).unwrap();
        assert_eq!(params.grade, None);
        let params: StudentListParams = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(params.grade, None);
    }

    #[test]
    fn test_grade_numeric_and_invalid() {
        let params: StudentListParams = serde_json::from_str(r#"{"grade":5}"#).unwrap();
        assert_eq!(params.grade, Some(5));
        assert!(serde_json::from_str::<StudentListParams>(r#"{"grade":"x"}"#).is_err());
    }
}

//! ipv64 API 响应类型

use serde::Deserialize;

/// `add_record` 的 400 响应中表示记录已存在的哨兵值
pub(crate) const RECORD_ALREADY_THERE: &str = "dns record already there";

/// `del_record` 的 202 响应中表示删除已受理的回显值
pub(crate) const DEL_RECORD_ACCEPTED: &str = "del_record";

/// Response body of an `add_record` request.
///
/// The API echoes the operation outcome in `add_record`; a duplicate create
/// carries [`RECORD_ALREADY_THERE`] together with HTTP 400. All fields default
/// to empty because error bodies do not reliably include every field.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AddRecordResponse {
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub add_record: String,
}

/// Response body of a `del_record` request.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DeleteRecordResponse {
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub del_record: String,
}

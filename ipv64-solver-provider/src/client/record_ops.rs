//! `RecordClient` trait 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::{ProviderError, Result};
use crate::traits::RecordClient;
use crate::types::RecordType;

use super::Ipv64Client;
use super::http::parse_json;
use super::types::{
    AddRecordResponse, DEL_RECORD_ACCEPTED, DeleteRecordResponse, RECORD_ALREADY_THERE,
};

#[async_trait]
impl RecordClient for Ipv64Client {
    async fn add_record(
        &self,
        subdomain: &str,
        prefix: &str,
        content: &str,
        record_type: RecordType,
    ) -> Result<()> {
        log::debug!("[ipv64] add_record: subdomain={subdomain}, praefix={prefix}, type={record_type}");

        let params = [
            ("add_record", subdomain),
            ("praefix", prefix),
            ("type", record_type.as_str()),
            ("content", content),
        ];
        let (status, body) = self.send_form(Method::POST, "add_record", &params).await?;
        let response: AddRecordResponse = parse_json(&body)?;
        log::debug!(
            "[ipv64] add_record response: status={}, info={}",
            response.status,
            response.info
        );

        match status {
            // API 对新建记录在 200/201 间摇摆，二者均视为成功
            200 | 201 => {
                log::info!("[ipv64] Added record {prefix}.{subdomain}");
                Ok(())
            }
            // 记录已存在：幂等成功
            400 if response.add_record == RECORD_ALREADY_THERE => {
                log::warn!("[ipv64] Record {prefix}.{subdomain} already there");
                Ok(())
            }
            _ => {
                log::error!("[ipv64] Could not add record: {}", response.info);
                Err(ProviderError::Api {
                    status,
                    info: response.info,
                })
            }
        }
    }

    async fn delete_record(
        &self,
        subdomain: &str,
        prefix: &str,
        content: &str,
        record_type: RecordType,
    ) -> Result<()> {
        log::debug!("[ipv64] del_record: subdomain={subdomain}, praefix={prefix}, type={record_type}");

        let params = [
            ("del_record", subdomain),
            ("praefix", prefix),
            ("type", record_type.as_str()),
            ("content", content),
        ];
        let (status, body) = self.send_form(Method::DELETE, "del_record", &params).await?;
        let response: DeleteRecordResponse = parse_json(&body)?;
        log::debug!(
            "[ipv64] del_record response: status={}, info={}",
            response.status,
            response.info
        );

        match status {
            200 => {
                log::info!("[ipv64] Deleted record {prefix}.{subdomain}");
                Ok(())
            }
            // 删除已受理（含记录已不存在的情况），回显字段确认后视为成功
            202 if response.del_record == DEL_RECORD_ACCEPTED => {
                log::info!("[ipv64] Deleted record {prefix}.{subdomain} (accepted)");
                Ok(())
            }
            _ => {
                log::error!("[ipv64] Could not delete record: {}", response.info);
                Err(ProviderError::Api {
                    status,
                    info: response.info,
                })
            }
        }
    }
}

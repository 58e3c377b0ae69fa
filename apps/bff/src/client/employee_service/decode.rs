//! # 上流レスポンスの寛容なデコード
//!
//! Employee Service は同じエンドポイントでもペイロードの形が揺れる。
//! その許容ルールはすべてこのモジュールに集約し、ここで一度だけテストする。
//!
//! | 入力 | 解釈 |
//! |------|------|
//! | 文字列フィールドが `""` / `null` | 欠落（エンベロープの `status` の `""` はそのまま保持） |
//! | 文字列フィールドが数値 | 10 進文字列 |
//! | `data` が欠落 / `null` / `""` / `[]` | 空リスト |
//! | `data` が単一オブジェクト | 1 要素のリスト |
//! | `data` 配列内の `null` / `""` | 読み飛ばす |
//! | 未知のフィールド | 無視 |
//! | ボディが空 / `null` | エンベロープ欠落（`InformationNotFound`） |
//! | 削除レスポンス | オブジェクトのまま受け取り `data` だけを取り除く |
//!
//! 上記以外の形はデコード全体を失敗させる（部分的な結果は返さない）。

use serde::{
    Deserialize,
    Deserializer,
    de::{DeserializeOwned, Error as _},
};
use serde_json::{Map, Value};

use super::{error::EmployeeServiceError, types::Employee};

/// 文字列または数値を文字列として読む
///
/// `null` は `None`、`""` は `Some("")` のまま返す。
pub(super) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::Text(text) => text,
            StringOrNumber::Number(number) => number.to_string(),
        }),
    )
}

/// 文字列フィールドを寛容に読む
///
/// `""` と `null` は `None`、数値は 10 進文字列として受け入れる。
pub(super) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_or_number(deserializer)?.filter(|text| !text.is_empty()))
}

/// エンベロープの `data` を社員リストに正規化する
pub(super) fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Employee>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(text)) if text.is_empty() => Ok(Vec::new()),
        Some(object @ Value::Object(_)) => serde_json::from_value(object)
            .map(|employee| vec![employee])
            .map_err(D::Error::custom),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(|item| !is_blank(item))
            .map(serde_json::from_value::<Employee>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!(
            "data はオブジェクトか配列である必要があります: {other}"
        ))),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// 2xx レスポンスのボディを `T` にデコードする
///
/// 空ボディと `null` はエンベロープ欠落として `InformationNotFound`、
/// 構造が合わない場合は `MalformedUpstreamData`。
pub(super) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, EmployeeServiceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(absent_body());
    }

    match serde_json::from_slice::<Option<T>>(body) {
        Ok(Some(decoded)) => Ok(decoded),
        Ok(None) => Err(absent_body()),
        Err(e) => Err(EmployeeServiceError::MalformedUpstreamData(e.to_string())),
    }
}

fn absent_body() -> EmployeeServiceError {
    EmployeeServiceError::InformationNotFound("上流サービスから応答データを取得できませんでした".to_string())
}

/// 削除レスポンスから `data` を取り除き、残りのキーを元の順序で返す
pub(super) fn without_data(mut body: Map<String, Value>) -> Map<String, Value> {
    body.shift_remove("data");
    body
}

/// 文字列で送られてくる数値フィールドを非負整数として読む
pub(super) fn parse_non_negative(
    field: &str,
    value: Option<&str>,
) -> Result<u64, EmployeeServiceError> {
    let Some(text) = value else {
        return Err(EmployeeServiceError::MalformedUpstreamData(format!(
            "{field} がありません"
        )));
    };

    text.parse::<u64>().map_err(|_| {
        EmployeeServiceError::MalformedUpstreamData(format!("{field} が数値ではありません: {text:?}"))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::client::employee_service::types::EmployeeEnvelope;

    fn decode_envelope(body: &str) -> Result<EmployeeEnvelope, EmployeeServiceError> {
        decode_body(body.as_bytes())
    }

    fn tiger_nixon() -> Employee {
        Employee {
            id: Some("1".to_string()),
            name: Some("Tiger Nixon".to_string()),
            salary: Some("320800".to_string()),
            age: Some("61".to_string()),
            profile_image: None,
        }
    }

    #[test]
    fn test_data配列をそのままリストにする() {
        let envelope = decode_envelope(
            r#"{
                "status": "success",
                "data": [
                    {"id": "1", "employee_name": "Tiger Nixon", "employee_salary": "320800", "employee_age": "61", "profile_image": ""},
                    {"id": "2", "employee_name": "Garrett Winters", "employee_salary": "170750", "employee_age": "63", "profile_image": ""}
                ],
                "message": "Successfully! All records has been fetched."
            }"#,
        )
        .unwrap();

        assert_eq!(envelope.status.as_deref(), Some("success"));
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0], tiger_nixon());
    }

    #[test]
    fn test_data単一オブジェクトを1要素のリストにする() {
        let envelope = decode_envelope(
            r#"{"status": "success", "data": {"id": "1", "employee_name": "Tiger Nixon", "employee_salary": "320800", "employee_age": "61"}}"#,
        )
        .unwrap();

        assert_eq!(envelope.data, vec![tiger_nixon()]);
    }

    #[test]
    fn test_data欠落_null_空文字_空配列は空リストにする() {
        for body in [
            r#"{"status": "success"}"#,
            r#"{"status": "success", "data": null}"#,
            r#"{"status": "success", "data": ""}"#,
            r#"{"status": "success", "data": []}"#,
        ] {
            let envelope = decode_envelope(body).unwrap();
            assert!(envelope.data.is_empty(), "空リストになること: {body}");
        }
    }

    #[test]
    fn test_data配列内のnullと空文字を読み飛ばす() {
        let envelope =
            decode_envelope(r#"{"data": [null, "", {"id": "7"}]}"#).unwrap();

        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id.as_deref(), Some("7"));
    }

    #[test]
    fn test_空文字フィールドを欠落として扱う() {
        let envelope = decode_envelope(
            r#"{"data": {"id": "3", "employee_name": "", "profile_image": ""}}"#,
        )
        .unwrap();

        assert_eq!(envelope.data[0].name, None);
        assert_eq!(envelope.data[0].profile_image, None);
    }

    #[test]
    fn test_数値フィールドを文字列として受け入れる() {
        let envelope = decode_envelope(
            r#"{"data": {"id": 25, "employee_salary": 5000, "employee_age": 45}}"#,
        )
        .unwrap();

        let employee = &envelope.data[0];
        assert_eq!(employee.id.as_deref(), Some("25"));
        assert_eq!(employee.salary.as_deref(), Some("5000"));
        assert_eq!(employee.age.as_deref(), Some("45"));
    }

    #[test]
    fn test_未知のフィールドを無視する() {
        let envelope = decode_envelope(
            r#"{"status": "success", "extra": {"a": 1}, "data": {"id": "1", "department": "sales"}}"#,
        )
        .unwrap();

        assert_eq!(envelope.data[0].id.as_deref(), Some("1"));
    }

    #[test]
    fn test_dataがスカラー値ならmalformed() {
        let result = decode_envelope(r#"{"status": "success", "data": 42}"#);

        assert!(matches!(
            result,
            Err(EmployeeServiceError::MalformedUpstreamData(_))
        ));
    }

    #[test]
    fn test_配列要素の型が不正ならリスト全体をmalformedにする() {
        let result = decode_envelope(r#"{"data": [{"id": "1"}, {"employee_name": true}]}"#);

        assert!(matches!(
            result,
            Err(EmployeeServiceError::MalformedUpstreamData(_))
        ));
    }

    #[test]
    fn test_不正なjsonならmalformed() {
        let result = decode_envelope("not json");

        assert!(matches!(
            result,
            Err(EmployeeServiceError::MalformedUpstreamData(_))
        ));
    }

    #[test]
    fn test_空ボディとnullはinformation_not_found() {
        for body in ["", "  \n", "null"] {
            let result = decode_envelope(body);
            assert!(
                matches!(result, Err(EmployeeServiceError::InformationNotFound(_))),
                "InformationNotFound になること: {body:?}"
            );
        }
    }

    fn decode_delete(body: &str) -> Result<Map<String, Value>, EmployeeServiceError> {
        decode_body(body.as_bytes()).map(without_data)
    }

    #[test]
    fn test_エンベロープのstatusは空文字を保持する() {
        let envelope = decode_envelope(r#"{"status": "", "data": []}"#).unwrap();

        assert_eq!(envelope.status.as_deref(), Some(""));
    }

    #[test]
    fn test_削除レスポンスからdataを取り除く() {
        let response = decode_delete(
            r#"{"status":"success","data":"2","message":"Successfully! Record has been deleted"}"#,
        )
        .unwrap();

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status":"success","message":"Successfully! Record has been deleted"}"#
        );
    }

    #[test]
    fn test_削除レスポンスの他のキーと空文字をそのまま残す() {
        let response =
            decode_delete(r#"{"status":"success","data":"2","message":"","code":7}"#).unwrap();

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status":"success","message":"","code":7}"#
        );
    }

    #[test]
    fn test_削除レスポンスがオブジェクトでなければmalformed() {
        for body in [r#"["success", "2"]"#, "42", r#""success""#] {
            let result = decode_delete(body);
            assert!(
                matches!(result, Err(EmployeeServiceError::MalformedUpstreamData(_))),
                "MalformedUpstreamData になること: {body}"
            );
        }
    }

    #[test]
    fn test_parse_non_negativeが数値を読む() {
        assert_eq!(parse_non_negative("employee_salary", Some("0")), Ok(0));
        assert_eq!(parse_non_negative("employee_salary", Some("170750")), Ok(170750));
    }

    #[test]
    fn test_parse_non_negativeが空白混じりを拒否する() {
        assert!(parse_non_negative("employee_salary", Some(" 100")).is_err());
        assert!(parse_non_negative("employee_salary", Some("1.5")).is_err());
    }
}

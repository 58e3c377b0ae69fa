//! # 社員コレクションの派生ビュー
//!
//! 取得済みの社員リストから集計値を計算する純粋関数群。
//! 給与は文字列で届くため、ここで整数に変換する。非数値が 1 件でもあれば
//! `MalformedUpstreamData` で失敗し、部分的な結果は返さない。

use std::cmp::Reverse;

use crate::client::{Employee, EmployeeServiceError};

/// 最高給与を返す
///
/// 空リストの場合は `InformationNotFound`。
pub fn highest_salary(employees: &[Employee]) -> Result<u64, EmployeeServiceError> {
    let salaries = employees
        .iter()
        .map(Employee::salary_value)
        .collect::<Result<Vec<_>, _>>()?;

    salaries.into_iter().max().ok_or_else(|| {
        EmployeeServiceError::InformationNotFound("給与情報がありません".to_string())
    })
}

/// 給与の高い順に最大 `n` 人の名前を返す
///
/// 同額の社員は元のリストの順序を保つ（安定ソート）。
/// 名前が欠落している社員は空文字になる。空リストなら空リストを返す。
pub fn top_earner_names(
    employees: &[Employee],
    n: usize,
) -> Result<Vec<String>, EmployeeServiceError> {
    let mut ranked = employees
        .iter()
        .map(|employee| employee.salary_value().map(|salary| (salary, employee)))
        .collect::<Result<Vec<_>, _>>()?;

    // sort_by_key は安定ソート
    ranked.sort_by_key(|(salary, _)| Reverse(*salary));

    Ok(ranked
        .into_iter()
        .take(n)
        .map(|(_, employee)| employee.name.clone().unwrap_or_default())
        .collect())
}

/// 名前に `term` を含む社員を返す（大文字小文字は区別しない）
///
/// 上流の並び順を保つ。名前のない社員は一致しない。
pub fn search_by_name(employees: &[Employee], term: &str) -> Vec<Employee> {
    let needle = term.to_lowercase();

    employees
        .iter()
        .filter(|employee| {
            employee
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `AnimalFormState`，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到请求对象的转换

use leptos::prelude::*;
use vetclinic_shared::{AnimalInfo, AnimalStatus};

/// 动物表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合在闭包和组件间传递。
#[derive(Clone, Copy)]
pub struct AnimalFormState {
    pub name: RwSignal<String>,
    pub kind: RwSignal<String>,
    pub breed: RwSignal<String>,
    pub age: RwSignal<String>,
    pub status: RwSignal<AnimalStatus>,
    pub weight: RwSignal<String>,
    pub microchip_number: RwSignal<String>,
    pub birth_date: RwSignal<String>,
    pub admission_date: RwSignal<String>,
    pub owner_name: RwSignal<String>,
    pub owner_contact: RwSignal<String>,
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl AnimalFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            kind: RwSignal::new(String::new()),
            breed: RwSignal::new(String::new()),
            age: RwSignal::new(String::new()),
            status: RwSignal::new(AnimalStatus::Healthy),
            weight: RwSignal::new(String::new()),
            microchip_number: RwSignal::new(String::new()),
            birth_date: RwSignal::new(String::new()),
            admission_date: RwSignal::new(String::new()),
            owner_name: RwSignal::new(String::new()),
            owner_contact: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        for field in [
            self.name,
            self.kind,
            self.breed,
            self.age,
            self.weight,
            self.microchip_number,
            self.birth_date,
            self.admission_date,
            self.owner_name,
            self.owner_contact,
        ] {
            field.set(String::new());
        }
        self.status.set(AnimalStatus::Healthy);
    }

    /// 转换为请求体；数字字段无法解析时视为未填写
    pub fn to_info(&self) -> AnimalInfo {
        AnimalInfo {
            name: self.name.get().trim().to_string(),
            kind: self.kind.get().trim().to_string(),
            breed: optional(self.breed.get()),
            age: self.age.get().trim().parse().ok(),
            status: self.status.get(),
            weight: self.weight.get().trim().parse().ok(),
            microchip_number: optional(self.microchip_number.get()),
            birth_date: optional(self.birth_date.get()),
            admission_date: optional(self.admission_date.get()),
            owner_name: optional(self.owner_name.get()),
            owner_contact: optional(self.owner_contact.get()),
        }
    }
}

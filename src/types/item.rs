use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateItem {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateItem {
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct ItemCreateRes {
    pub message: String,
    pub id: i32,
}

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::item::{CreateItem, UpdateItem};
use entity::item::{ActiveModel as ItemActive, Entity as Item, Model as ItemModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set};

impl PostgresService {
    pub async fn get_all_items(&self) -> Result<Vec<ItemModel>, AppError> {
        Ok(Item::find().all(&self.db).await?)
    }

    pub async fn get_item_by_id(&self, id: i32) -> Result<ItemModel, AppError> {
        Ok(Item::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Item does not exist".into()))?)
    }

    pub async fn create_item(&self, payload: CreateItem) -> Result<ItemModel, AppError> {
        let item = ItemActive {
            name: Set(payload.name),
            ..Default::default()
        };
        Ok(item.insert(&self.db).await?)
    }

    pub async fn update_item(&self, id: i32, payload: UpdateItem) -> Result<ItemModel, AppError> {
        let mut item: ItemActive = self.get_item_by_id(id).await?.into();
        item.name = Set(payload.name);
        Ok(item.update(&self.db).await?)
    }

    pub async fn delete_item(&self, id: i32) -> Result<(), AppError> {
        // missing ids must surface as NotFound
        self.get_item_by_id(id).await?;
        Item::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

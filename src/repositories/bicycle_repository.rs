use crate::database::{JsonStore, StoreError, BICYCLES_FILE};
use crate::models::{Bicycle, BicyclesDocument};
use serde::Serialize;

#[derive(Serialize)]
struct BicyclesDocumentRef<'a> {
    bicicletas: &'a [Bicycle],
}

pub struct BicycleRepository {
    store: JsonStore,
}

impl BicycleRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Bicycle>, StoreError> {
        let document: BicyclesDocument = self.store.load(BICYCLES_FILE).await?;
        Ok(document.bicicletas)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Bicycle>, StoreError> {
        let bicycles = self.find_all().await?;
        Ok(bicycles.into_iter().find(|b| b.id == id))
    }

    pub async fn save_all(&self, bicycles: &[Bicycle]) -> Result<(), StoreError> {
        log::debug!("💾 Guardando {} bicicletas", bicycles.len());
        self.store
            .save(BICYCLES_FILE, &BicyclesDocumentRef { bicicletas: bicycles })
            .await
    }
}

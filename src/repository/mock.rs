//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::shop::{NewShop, Shop};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ShopListQuery, ShopReader, ShopWriter};

mock! {
    pub Repository {}

    impl ShopReader for Repository {
        fn list_shops(&self, query: ShopListQuery) -> RepositoryResult<(usize, Vec<Shop>)>;
    }

    impl ShopWriter for Repository {
        fn create_shops(&self, new_shops: &[NewShop]) -> RepositoryResult<usize>;
    }
}

pub mod posts;
pub mod projects;
pub mod taxonomy;

pub use posts::{
    GetPostUseCase, GetPostsByCategoryUseCase, GetPostsByTagUseCase, GetPostsUseCase,
    IncrementViewUseCase, SearchPostsUseCase,
};
pub use projects::{GetProjectUseCase, GetProjectsUseCase};
pub use taxonomy::{GetCategoriesUseCase, GetTagsUseCase};

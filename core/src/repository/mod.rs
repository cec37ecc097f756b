pub mod dynamo;
pub mod memory;
pub mod traits;

pub use dynamo::DynamoTaskRepository;
pub use memory::MemoryTaskRepository;
pub use traits::TaskRepository;

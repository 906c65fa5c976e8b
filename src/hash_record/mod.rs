pub mod catalog;
pub mod descriptor;
mod mapper;
mod read_op;
pub mod record;
mod write_op;

pub use descriptor::{Accessor, FieldDescriptor, FieldType, RecordBuilder, RecordDescriptor};
pub use mapper::RecordMapper;
pub use read_op::read_record;
pub use record::HashRecord;
pub use write_op::write_record;

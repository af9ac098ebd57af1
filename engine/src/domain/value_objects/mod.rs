pub mod list_order;
pub mod policy_kind;
pub mod priority;
pub mod process_id;
pub mod process_state;

pub use list_order::ListOrder;
pub use policy_kind::PolicyKind;
pub use priority::Priority;
pub use process_id::ProcessId;
pub use process_state::ProcessState;

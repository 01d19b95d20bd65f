pub mod pachca;

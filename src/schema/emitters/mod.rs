//! Text emitters over the model/relation snapshot.

mod prisma;
mod typescript;

pub use prisma::PrismaEmitter;
pub use typescript::TypeScriptEmitter;

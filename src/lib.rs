/*!
Amalgamate a C library made of separate headers and implementation files
into a single-header library.

The bundle holds every declaration unconditionally, and the implementations
inside an `#ifdef <NAME>_IMPLEMENTATION` region that exactly one compilation
unit of the consumer enables:

```c
#define CITERON_IMPLEMENTATION
#include "citeron.h"
```

Per-file include guards and `#include "..."` lines are dropped on the way,
each file gets a banner, and runs of blank lines are collapsed.

```no_run
use std::path::Path;
use singleheader::{Bundler, Config};

let config = Config::default();
Bundler::new(&config, Path::new("citeron.h")).run()?;
# Ok::<(), singleheader::Error>(())
```
*/

pub mod amalgamator;
pub mod bundler;
pub mod collapse;
pub mod collector;
pub mod config;
pub mod error;
pub mod filter;
pub mod source;

pub use amalgamator::Amalgamator;
pub use bundler::Bundler;
pub use collapse::collapse_blank_lines;
pub use collector::{collect, Collected, Role, SourceFile};
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{FilterRule, LineFilter};
pub use source::{read_sources, SourceText, Sources};

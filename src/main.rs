//! yarn-start buildpack
//!
//! Entry point invoked by the lifecycle as `bin/detect` and `bin/build`.

use yarn_start_buildpack::YarnStartBuildpack;

libcnb::buildpack_main!(YarnStartBuildpack);

mod discard_images;

pub(crate) use discard_images::discard_image_files;

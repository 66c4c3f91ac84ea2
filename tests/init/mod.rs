mod init_repository_successfully;
mod commands_outside_a_repository_fail;
